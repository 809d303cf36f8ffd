pub mod coach;
pub mod dashboard;
pub mod reflect;
pub mod today;
pub mod tracker;

/// Split a `KEY=VALUE` flag argument.
pub fn split_pair<'a>(arg: &'a str, flag: &str) -> anyhow::Result<(&'a str, &'a str)> {
    arg.split_once('=')
        .filter(|(k, v)| !k.is_empty() && !v.is_empty())
        .ok_or_else(|| anyhow::anyhow!("--{flag} expects KEY=VALUE, got '{arg}'"))
}
