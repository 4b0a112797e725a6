//! Integration tests driving the compiled liftoff binary


mod test_check;
mod test_init;
mod test_show;
