pub mod login;
pub mod recovery;

pub use login::LoginPage;
pub use recovery::RecoveryPage;
