mod layout;
pub use layout::{AuthLayout, TabLayout};

mod auth;
pub use auth::{Login, Signup};

mod tabs;
pub use tabs::{Create, Discover, Messages, Profile, Search};
