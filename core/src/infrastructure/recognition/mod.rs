pub mod stub_recognizer;

pub use stub_recognizer::StubFoodRecognizer;
