use crate::models::{Accent, Faq, Society, TeamMember};

const LOGO: &str = "/static/logo.svg";

const fn member(name: &'static str, phone: &'static str) -> TeamMember {
    TeamMember {
        name,
        phone,
        image: LOGO,
        role: None,
    }
}

pub fn senior_coordinators() -> Vec<TeamMember> {
    vec![
        member("Aashi Shrivastava", "9905980187"),
        member("Aayush Mishra", "9155521044"),
        member("Adil Irshad", "7903063468"),
        member("Akshita Anand", "7480021240"),
        member("Amisha Giri", "9262356963"),
    ]
}

pub fn coordinators() -> Vec<TeamMember> {
    vec![
        member("Aman Kumar", "9905000955"),
        member("Anand Prabhat", "7870510637"),
        member("Anjali Kumari", "9835686389"),
        member("Ayushi Singh", "9135810898"),
        member("Deepa Singh", "9336507188"),
    ]
}

pub fn faqs() -> Vec<Faq> {
    vec![
        Faq {
            question: "HOW MUCH IS THE REGISTRATION FEE?",
            answer: "The registration fee is ₹999 for a single pass which covers entry to all events.",
        },
        Faq {
            question: "I HAVE COMPLETED THE PAYMENT, BUT I AM UNABLE TO REGISTER FOR ANY EVENT. WHY?",
            answer: "Please allow up to 24 hours for payment confirmation. If the issue persists, contact our support team with your transaction ID.",
        },
        Faq {
            question: "CAN THE EVENTS BE DISTRIBUTED MORE EVENLY ACROSS ALL THREE DAYS?",
            answer: "The schedule is designed to maximize participation and minimize clashes. However, minor adjustments might be made closer to the event date.",
        },
        Faq {
            question: "WHAT ARE THE PRIZES FOR THE DIFFERENT COMPETITIONS?",
            answer: "Prizes worth over ₹5 Lakhs are up for grabs! Detailed prize breakdown for each event is available in the Rulebook.",
        },
        Faq {
            question: "WILL FOOD AND ACCOMMODATION FACILITIES BE PROVIDED BY THE COLLEGE FOR OUTSTATION PARTICIPANTS?",
            answer: "Yes, accommodation is available at a nominal cost. Food stalls will be set up on campus providing a variety of cuisines.",
        },
        Faq {
            question: "WITH A SINGLE REGISTRATION FEE OF ₹999, HOW MANY EVENTS CAN A PARTICIPANT TAKE PART IN AND WHAT BENEFITS ARE INCLUDED?",
            answer: "The single fee covers participation in UNLIMITED events, subject to schedule clashes. It also includes entry to all Pro Nites and a welcome kit.",
        },
    ]
}

pub fn societies() -> Vec<Society> {
    vec![
        Society {
            title: "Acting and Drama",
            subtitle: "Society",
            accent: Accent::Red,
        },
        Society {
            title: "Fine Arts",
            subtitle: "Society",
            accent: Accent::Blue,
        },
        Society {
            title: "Music & Dance",
            subtitle: "Society",
            accent: Accent::Red,
        },
        Society {
            title: "Literature & Debate",
            subtitle: "Society",
            accent: Accent::Yellow,
        },
    ]
}
