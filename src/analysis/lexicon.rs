//! Static sentiment lexicon.
//!
//! AFINN-style word list mapping lowercase words to integer polarity
//! weights in `[-5, 5]`. The lookup table is built once on first use and
//! only read afterwards, so it is shared freely across threads.

use once_cell::sync::Lazy;
use std::collections::HashMap;

const ENTRIES: &[(&str, i32)] = &[
    // Strongly positive
    ("amazing", 4),
    ("awesome", 4),
    ("breathtaking", 5),
    ("brilliant", 4),
    ("ecstatic", 4),
    ("euphoric", 4),
    ("fabulous", 4),
    ("fantastic", 4),
    ("fun", 4),
    ("funny", 4),
    ("hurrah", 5),
    ("masterpiece", 4),
    ("miracle", 4),
    ("outstanding", 5),
    ("rejoice", 4),
    ("stunning", 4),
    ("superb", 5),
    ("thrilled", 5),
    ("triumph", 4),
    ("win", 4),
    ("wonderful", 4),
    ("wow", 4),
    // Positive
    ("admire", 3),
    ("adore", 3),
    ("beautiful", 3),
    ("best", 3),
    ("celebrate", 3),
    ("charming", 3),
    ("cheer", 2),
    ("cheerful", 2),
    ("delight", 3),
    ("delighted", 3),
    ("enjoy", 2),
    ("enjoyed", 2),
    ("excellent", 3),
    ("excited", 3),
    ("exciting", 3),
    ("glad", 3),
    ("good", 3),
    ("gorgeous", 3),
    ("great", 3),
    ("happy", 3),
    ("joy", 3),
    ("love", 3),
    ("loved", 3),
    ("lovely", 3),
    ("nice", 3),
    ("perfect", 3),
    ("pleasant", 3),
    ("pleased", 3),
    ("proud", 2),
    ("recommend", 2),
    ("smile", 2),
    ("success", 2),
    ("successful", 3),
    ("won", 3),
    ("agree", 1),
    ("appreciate", 2),
    ("appreciated", 2),
    ("better", 2),
    ("calm", 2),
    ("care", 2),
    ("clean", 2),
    ("comfortable", 2),
    ("confident", 2),
    ("cool", 1),
    ("easy", 1),
    ("fair", 2),
    ("fine", 2),
    ("free", 1),
    ("friendly", 2),
    ("gain", 2),
    ("hope", 2),
    ("hopeful", 2),
    ("help", 2),
    ("helpful", 2),
    ("interesting", 2),
    ("kind", 2),
    ("like", 2),
    ("liked", 2),
    ("lol", 3),
    ("lucky", 3),
    ("positive", 2),
    ("promise", 1),
    ("safe", 1),
    ("solid", 2),
    ("support", 2),
    ("supported", 2),
    ("sweet", 2),
    ("thank", 2),
    ("thanks", 2),
    ("useful", 2),
    ("welcome", 2),
    ("yes", 1),
    ("ok", 0),
    // Negative
    ("afraid", -2),
    ("alarmed", -2),
    ("annoyed", -2),
    ("annoying", -2),
    ("anxious", -2),
    ("bored", -2),
    ("boring", -3),
    ("broken", -1),
    ("complain", -2),
    ("concerned", -2),
    ("confused", -2),
    ("crash", -2),
    ("cry", -1),
    ("difficult", -1),
    ("disappointed", -2),
    ("disappointing", -2),
    ("dislike", -2),
    ("doubt", -1),
    ("dumb", -3),
    ("error", -2),
    ("fail", -2),
    ("failed", -2),
    ("failure", -2),
    ("fear", -2),
    ("fight", -1),
    ("frustrated", -2),
    ("frustrating", -2),
    ("hard", -1),
    ("hurt", -2),
    ("lonely", -2),
    ("lose", -3),
    ("lost", -3),
    ("mad", -3),
    ("mess", -2),
    ("miss", -2),
    ("missing", -2),
    ("nervous", -2),
    ("no", -1),
    ("pain", -2),
    ("panic", -3),
    ("poor", -2),
    ("problem", -2),
    ("problems", -2),
    ("sad", -2),
    ("scared", -2),
    ("sick", -2),
    ("slow", -2),
    ("sorry", -1),
    ("stress", -1),
    ("stuck", -2),
    ("stupid", -2),
    ("tired", -2),
    ("trouble", -2),
    ("ugly", -3),
    ("unhappy", -2),
    ("upset", -2),
    ("weak", -2),
    ("worried", -3),
    ("worry", -3),
    ("wrong", -2),
    // Strongly negative
    ("angry", -3),
    ("awful", -3),
    ("bad", -3),
    ("bitter", -2),
    ("catastrophe", -3),
    ("crisis", -3),
    ("cruel", -3),
    ("dead", -3),
    ("depressed", -2),
    ("destroy", -3),
    ("died", -3),
    ("disaster", -2),
    ("disgusting", -3),
    ("dreadful", -3),
    ("evil", -3),
    ("furious", -3),
    ("garbage", -1),
    ("hate", -3),
    ("hated", -3),
    ("hatred", -3),
    ("horrible", -3),
    ("kill", -3),
    ("miserable", -3),
    ("nightmare", -3),
    ("pathetic", -2),
    ("rage", -2),
    ("ruined", -2),
    ("scam", -2),
    ("terrible", -3),
    ("terrified", -3),
    ("terror", -3),
    ("toxic", -3),
    ("useless", -2),
    ("worst", -3),
    ("worthless", -2),
    ("catastrophic", -4),
    ("devastated", -2),
    ("horrific", -3),
    ("torture", -4),
    // Everyday chat vocabulary
    ("abandon", -2),
    ("abandoned", -2),
    ("abuse", -3),
    ("accept", 1),
    ("accepted", 1),
    ("accident", -2),
    ("accomplish", 2),
    ("accomplished", 2),
    ("advantage", 2),
    ("aggressive", -2),
    ("agreed", 1),
    ("alarm", -2),
    ("alone", -2),
    ("annoy", -2),
    ("apologize", -1),
    ("approval", 2),
    ("approve", 2),
    ("ashamed", -2),
    ("bankrupt", -3),
    ("benefit", 2),
    ("blame", -2),
    ("bless", 2),
    ("bother", -2),
    ("cancel", -1),
    ("cancelled", -1),
    ("careful", 2),
    ("chaos", -2),
    ("clear", 1),
    ("congrats", 2),
    ("congratulations", 2),
    ("crazy", -2),
    ("damage", -3),
    ("danger", -2),
    ("delay", -1),
    ("delayed", -1),
    ("effective", 2),
    ("grateful", 3),
    ("ignore", -1),
    ("improve", 2),
    ("improved", 2),
    ("please", 1),
    ("smart", 1),
    ("agony", -3),
    ("cheated", -3),
    ("clever", 2),
    ("curious", 1),
    ("eager", 2),
    ("embarrassed", -2),
    ("fault", -2),
    ("fired", -2),
    ("gloomy", -2),
    ("greed", -3),
    ("happiness", 3),
    ("harm", -2),
    ("helpless", -2),
    ("ill", -2),
    ("impressed", 3),
    ("impressive", 3),
    ("inspired", 2),
    ("joke", 2),
    ("jealous", -2),
    ("loss", -3),
    ("misery", -3),
    ("motivated", 2),
    ("optimistic", 2),
    ("peaceful", 2),
    ("pretty", 1),
    ("relief", 1),
    ("relieved", 2),
    ("risk", -2),
    ("rude", -2),
    ("secure", 2),
    ("shame", -2),
    ("shock", -2),
    ("strong", 2),
    ("suffer", -2),
    ("threat", -2),
    ("trust", 1),
    ("unfair", -2),
    ("victory", 3),
    ("warm", 1),
    ("yummy", 3),
];

static LEXICON: Lazy<HashMap<&'static str, i32>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// Returns the polarity weight of a lowercase token, if it is in the lexicon.
pub fn polarity(token: &str) -> Option<i32> {
    LEXICON.get(token).copied()
}

/// Number of distinct words in the lexicon.
pub fn len() -> usize {
    LEXICON.len()
}
