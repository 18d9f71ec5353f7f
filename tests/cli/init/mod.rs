mod default_scaffold_contract;
mod explicit_flags_contract;
mod git_remote_inference_contract;
mod invalid_path_contract;
