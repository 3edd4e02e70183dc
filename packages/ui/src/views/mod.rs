mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod discover;
pub use discover::DiscoverView;

mod search;
pub use search::SearchView;

mod messages;
pub use messages::MessagesView;

mod create_project;
pub use create_project::CreateProjectView;

mod profile;
pub use profile::ProfileView;
