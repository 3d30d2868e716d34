//! Hard-coded festival content. Nothing here is fetched from the provider.

pub use events::catalog;
pub use people::*;

mod events;
mod people;

pub const FESTIVAL_DATES: &str = "10 - 12 Mar '26";
pub const FESTIVAL_VENUE: &str = "SEC Supaul";

pub const UPI_ID: &str = "culturahub@upi";
pub const UPI_PAYEE: &str = "CulturaHub";

pub const BANK_NAME: &str = "HDFC Bank";
pub const BANK_ACCOUNT_NAME: &str = "CulturaHub Fest";
pub const BANK_ACCOUNT_NO: &str = "123456789012";
pub const BANK_IFSC: &str = "HDFC0001234";

/// QR image for a UPI payment of `amount` rupees.
pub fn upi_qr_url(amount: u32) -> String {
    let upi = format!(
        "upi://pay?pa={}&pn={}&am={}&cu=INR",
        UPI_ID, UPI_PAYEE, amount
    );
    format!(
        "https://api.qrserver.com/v1/create-qr-code/?size=150x150&data={}",
        urlencoding::encode(&upi)
    )
}
