#![no_std]

pub mod hd44780;
pub mod periodic_timer;
