//! End to end tests of compiled expressions against the runtime.

#[cfg(test)]
mod determinism;
#[cfg(test)]
mod end_to_end;
