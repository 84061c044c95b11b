//! Page components.

mod home;
mod landing;
mod sign_in;

pub use home::HomePage;
pub use landing::LandingPage;
pub use sign_in::{SignInPage, sign_in};
