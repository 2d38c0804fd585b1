/// Phrases a suspected user has to repeat to pass the sobriety test.
pub const TONGUE_TWISTERS: &[&str] = &[
    "Карл у Клары украл кораллы, а Клара у Карла украла кларнет",
    "Шла Саша по шоссе и сосала сушку",
    "От топота копыт пыль по полю летит",
    "Как утром, так и вечером – все повторится снова",
    "На дворе трава, на траве дрова",
];
