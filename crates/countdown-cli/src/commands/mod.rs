pub mod config;
pub mod countdown;
pub mod pomodoro;
pub mod share;
pub mod watch;
