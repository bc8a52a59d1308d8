mod layout_tests;
mod path_tests;
