mod helpers;
mod login;
mod refresh;
