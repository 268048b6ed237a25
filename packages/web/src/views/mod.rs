mod dashboard;
mod sign_in;
mod sign_up;

pub use dashboard::Dashboard;
pub use sign_in::SignIn;
pub use sign_up::SignUp;
