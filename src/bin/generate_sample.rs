//! Generates a small deterministic Olympics fixture:
//! `athlete_events.csv` and `noc_regions.csv` in the working directory.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo)
    }
}

const NATIONS: &[(&str, &str, &str)] = &[
    ("FRA", "France", "France"),
    ("USA", "United States", "USA"),
    ("GBR", "Great Britain", "UK"),
    ("GER", "Germany", "Germany"),
    ("JPN", "Japan", "Japan"),
    ("KEN", "Kenya", "Kenya"),
    ("BRA", "Brazil", "Brazil"),
    ("AUS", "Australia", "Australia"),
];

const SPORTS: &[(&str, &[&str])] = &[
    ("Athletics", &["Men's 100m", "Women's Marathon", "Men's Long Jump"]),
    ("Swimming", &["Men's 200m Freestyle", "Women's 100m Butterfly"]),
    ("Fencing", &["Men's Foil", "Women's Sabre"]),
    ("Gymnastics", &["Women's All-Around", "Men's Rings"]),
    ("Rowing", &["Men's Coxed Pairs"]),
];

const GAMES: &[(i32, &str)] = &[
    (1996, "Atlanta"),
    (2000, "Sydney"),
    (2004, "Athina"),
    (2008, "Beijing"),
    (2012, "London"),
    (2016, "Rio de Janeiro"),
];

const FIRST_NAMES_M: &[&str] = &["Jean", "Tom", "Hiro", "Lucas", "David", "Karl", "Sam", "Luis"];
const FIRST_NAMES_F: &[&str] = &["Marie", "Anna", "Yui", "Clara", "Grace", "Ines", "Lena", "Ruth"];
const LAST_NAMES: &[&str] = &[
    "Dupont", "Smith", "Tanaka", "Silva", "Brown", "Keino", "Weber", "Jones",
];

fn main() {
    let mut rng = SimpleRng::new(42);

    // Region mapping, with one deliberately unmapped NOC to exercise the
    // left-join null path.
    let mut regions = csv::Writer::from_path("noc_regions.csv").expect("create noc_regions.csv");
    regions
        .write_record(["NOC", "region", "notes"])
        .expect("write header");
    for &(noc, _, region) in NATIONS {
        regions
            .write_record([noc, region, ""])
            .expect("write region row");
    }
    regions
        .write_record(["ROT", "", "Refugee Olympic Team"])
        .expect("write region row");
    regions.flush().expect("flush noc_regions.csv");

    let mut events = csv::Writer::from_path("athlete_events.csv").expect("create athlete_events.csv");
    events
        .write_record([
            "ID", "Name", "Sex", "Age", "Height", "Weight", "Team", "NOC", "Games", "Year",
            "Season", "City", "Sport", "Event", "Medal",
        ])
        .expect("write header");

    let mut id: u64 = 0;
    for &(year, city) in GAMES {
        let games = format!("{year} Summer");
        for &(sport, sport_events) in SPORTS {
            for &event in sport_events {
                let sex = if event.starts_with("Women") { "F" } else { "M" };
                let full_event = format!("{sport} {event}");
                // Eight entrants per event; the first three medal.
                for rank in 0..8u32 {
                    id += 1;
                    let &(noc, team, _) = rng.pick(NATIONS);
                    let first = if sex == "M" {
                        rng.pick(FIRST_NAMES_M)
                    } else {
                        rng.pick(FIRST_NAMES_F)
                    };
                    let last = rng.pick(LAST_NAMES);
                    let name = format!("{first} {last}");
                    // ~5% of demographic values go missing, as in the real data.
                    let age = rng.range(17, 38).to_string();
                    let age = maybe_na(&mut rng, age);
                    let height = rng.range(150, 205).to_string();
                    let height = maybe_na(&mut rng, height);
                    let weight = rng.range(45, 110).to_string();
                    let weight = maybe_na(&mut rng, weight);
                    let medal = match rank {
                        0 => "Gold",
                        1 => "Silver",
                        2 => "Bronze",
                        _ => "NA",
                    };
                    events
                        .write_record([
                            id.to_string(),
                            name,
                            sex.to_string(),
                            age,
                            height,
                            weight,
                            team.to_string(),
                            noc.to_string(),
                            games.clone(),
                            year.to_string(),
                            "Summer".to_string(),
                            city.to_string(),
                            sport.to_string(),
                            full_event.clone(),
                            medal.to_string(),
                        ])
                        .expect("write event row");
                }
            }
        }
    }
    // A couple of Winter rows that preprocessing must drop.
    for (i, &(noc, team, _)) in NATIONS.iter().take(2).enumerate() {
        id += 1;
        events
            .write_record([
                id.to_string(),
                format!("Erik Nilsson {i}"),
                "M".to_string(),
                "25".to_string(),
                "178".to_string(),
                "74".to_string(),
                team.to_string(),
                noc.to_string(),
                "2014 Winter".to_string(),
                "2014".to_string(),
                "Winter".to_string(),
                "Sochi".to_string(),
                "Ice Hockey".to_string(),
                "Ice Hockey Men's Ice Hockey".to_string(),
                "NA".to_string(),
            ])
            .expect("write event row");
    }
    events.flush().expect("flush athlete_events.csv");

    println!("Wrote {id} event rows to athlete_events.csv and noc_regions.csv");
}

fn maybe_na(rng: &mut SimpleRng, value: String) -> String {
    if rng.next_u64() % 20 == 0 {
        "NA".to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_label_is_reused_across_all_entrant_rows() {
        let mut rng = SimpleRng::new(7);
        let mut writer = csv::Writer::from_writer(Vec::new());

        let full_event = "Fencing Men's Foil".to_string();
        for rank in 0..8u32 {
            let &(noc, team, _) = rng.pick(NATIONS);
            writer
                .write_record([
                    rank.to_string(),
                    team.to_string(),
                    noc.to_string(),
                    full_event.clone(),
                ])
                .unwrap();
        }

        let data = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(data.lines().count(), 8);
        assert!(data.lines().all(|line| line.contains("Fencing Men's Foil")));
    }

    #[test]
    fn rng_is_deterministic_for_a_fixed_seed() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }
}
