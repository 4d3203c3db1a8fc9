pub mod nadir_controller;
