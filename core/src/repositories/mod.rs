pub mod movie;
pub mod user;

pub use movie::MovieRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use movie::MockMovieRepository;
#[cfg(test)]
pub use user::MockUserRepository;
