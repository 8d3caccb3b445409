pub mod formations;
