mod menu;
mod order;
mod room;
mod user;
