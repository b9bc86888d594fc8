pub mod about;
pub mod contact;
pub mod experience;
pub mod gallery;
pub mod hero;
pub mod projects;
pub mod skills;
