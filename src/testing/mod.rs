mod fake_gh;

#[allow(unused_imports)]
pub use fake_gh::{FakeCall, FakeGh, failed, ok};
