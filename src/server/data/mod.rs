//! Database repository layer for all domain entities.
//!
//! Each repository wraps SeaORM calls for one entity and converts entity models into
//! domain models at the boundary. Repositories return raw `DbErr`; classification into
//! `AppError` happens in the service layer.

pub mod album;
pub mod genre;
pub mod track;
pub mod user;

#[cfg(test)]
mod test;
