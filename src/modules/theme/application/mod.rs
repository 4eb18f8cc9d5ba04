pub mod ports;
pub mod services;
pub mod theme_controller;
