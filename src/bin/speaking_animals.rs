use speaking_animals::{logging, run, Roster};

fn main() {
    logging::init();
    run(&Roster::default());
}
