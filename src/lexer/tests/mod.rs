//! Тесты лексического анализатора

mod stream_tests;
