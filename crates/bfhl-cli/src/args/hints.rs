pub mod cmd {
    // Submission
    pub const SUBMIT: &str = "bfhl submit --input '{\"data\": [\"A\", \"1\"]}'";
    pub const SUBMIT_FILTERED: &str =
        "bfhl submit --input '{\"data\": [\"A\", \"1\"]}' --filter alphabets,numbers";
    pub const FORM: &str = "bfhl form";

    // Service
    pub const STATUS: &str = "bfhl status";

    // Config
    pub const CONFIG_SHOW: &str = "bfhl config show";
    pub const CONFIG_INIT: &str = "bfhl config init";
    pub const CONFIG_INIT_FORCE: &str = "bfhl config init --force";
}
