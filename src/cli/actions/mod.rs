pub mod run;
pub mod scan;

#[derive(Debug)]
pub enum Action {
    Run { ascii: bool },
}
