mod resting_contact;
mod scenarios;
#[cfg(feature = "parallel")]
mod parallel_execution;
