//! Unit tests for the sticky board.

mod gesture_tests;
mod storage_tests;
