use serde::{Deserialize, Serialize};
use sqlx::Type;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "testtype", rename_all = "lowercase")]
pub(crate) enum TestType {
    Test,
    Quiz,
}

impl TestType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            TestType::Test => "test",
            TestType::Quiz => "quiz",
        }
    }
}
