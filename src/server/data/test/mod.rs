mod album;
mod genre;
mod track;
mod user;
