use std::num::NonZero;

use darkhex_pone::{Player, SolverBuilder, State};

fn main() {
    // one row: black's first stone already joins north to south
    let row = SolverBuilder::with_dims((NonZero::new(3).unwrap(), NonZero::new(1).unwrap()))
        .build()
        .unwrap();
    let solution = row.find_positions().unwrap();
    assert!(solution.is_forced_win(&"...".parse::<State>().unwrap(), 0));

    // the smallest board where hidden stones matter
    let square = SolverBuilder::with_dims((NonZero::new(2).unwrap(), NonZero::new(2).unwrap()))
        .designate(Player::Black)
        .build()
        .unwrap();
    let solution = square.find_positions().unwrap();
    assert!(solution.is_forced_win(&"....".parse::<State>().unwrap(), 0));

    let layout = square.config().layout();
    for (state, hidden) in solution.forced_wins() {
        println!("{hidden} hidden\n{}", layout.render(state));
    }
    println!("{} forced wins for black on 2x2", solution.len());
}
