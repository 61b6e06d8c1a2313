pub mod handle_check;
