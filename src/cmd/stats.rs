use crate::reports;
use clap::Args;
use glyphbreak::cipher::{Ciphertext, FrequencyBasis};
use glyphbreak::error::SolverResult;

#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    /// Count symbols over the raw stream or over distinct words
    #[arg(short = 'b', long, default_value_t = FrequencyBasis::DistinctWord)]
    pub basis: FrequencyBasis,

    /// How many of the most repeated words to list
    #[arg(short = 'w', long, default_value_t = 10)]
    pub words: usize,
}

pub fn run(args: StatsArgs, cipher: &Ciphertext) -> SolverResult<()> {
    reports::print_overview(cipher);
    reports::print_symbol_frequencies(cipher, args.basis);
    if args.words > 0 {
        reports::print_word_frequencies(cipher, args.words);
    }
    Ok(())
}
