pub(crate) mod prompt_logs;
pub(crate) mod question_sets;
pub(crate) mod submissions;
pub(crate) mod teacher_users;
