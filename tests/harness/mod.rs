#![allow(dead_code)]

pub(crate) mod fake_gh;
pub(crate) mod test_context;

pub(crate) use fake_gh::FakeGh;
pub(crate) use test_context::TestContext;
