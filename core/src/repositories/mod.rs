pub mod user;

pub use user::UserRepository;

#[cfg(test)]
pub use user::MockUserRepository;
