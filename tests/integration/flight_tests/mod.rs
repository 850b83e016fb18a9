mod clearances;
mod phases;
mod session;
