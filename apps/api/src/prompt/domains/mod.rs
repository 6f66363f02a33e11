//! Domain prompt builders. One builder per subject domain, all following the
//! same shape: role/style block, safety block where the domain needs one,
//! task catalog, tier gate, speed phrase, memory spec, pseudo-tag rules.
//! Every builder is a pure total function over its options.

pub mod business;
pub mod creative;
pub mod culinary;
pub mod developer;
pub mod faith;
pub mod finance;
pub mod gaming;
pub mod health;
pub mod kids;
pub mod knowledge;
pub mod legal;
pub mod lifestyle;
pub mod outdoors;
pub mod practical;
pub mod study;
pub mod trades;
pub mod universal;
