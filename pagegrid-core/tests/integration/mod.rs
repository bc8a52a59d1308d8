mod editor_tests;
mod store_roundtrip;
