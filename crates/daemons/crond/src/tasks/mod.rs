pub mod release_suspensions;
