mod aircraft;
mod airport;
mod flight;
mod seat;
