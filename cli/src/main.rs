use rand::{Rng, SeedableRng};
use rand_isaac::Isaac64Rng;
use rand_range::{Dice, RandomRange};
use std::fs::File;
use std::io::Read;
use std::process;
use sugoroku_procgen::{GeneratorConfig, Map, MapSpec, Size};

mod render;

struct Args {
    size: Size,
    rng_seed: Option<u64>,
    config_file: Option<String>,
    json: bool,
    arrows: bool,
    roll: u32,
}

impl Args {
    fn parser() -> impl meap::Parser<Item = Self> {
        meap::let_map! {
            let {
                width = opt_opt::<u32, _>("INT", 'x').name("width").desc("width in cells")
                    .with_default(16);
                height = opt_opt::<u32, _>("INT", 'y').name("height").desc("height in cells")
                    .with_default(12);
                rng_seed = opt_opt::<u64, _>("INT", 'r').name("rng-seed").desc("rng seed");
                config_file = opt_opt::<String, _>("PATH", 'c').name("config-file")
                    .desc("generator config (json)");
                json = flag("json").desc("print the map as json");
                arrows = flag("arrows").desc("draw legal directions on the path");
                roll = opt_opt::<u32, _>("INT", 'd').name("roll")
                    .desc("roll a d6 this many times after generating")
                    .with_default(0);
            } in {
                Self {
                    size: Size::new(width, height),
                    rng_seed,
                    config_file,
                    json,
                    arrows,
                    roll,
                }
            }
        }
    }
}

fn read_config_file(path: &str) -> Option<GeneratorConfig> {
    let mut buf = Vec::new();
    let mut f = File::open(path).ok()?;
    f.read_to_end(&mut buf).ok()?;
    serde_json::from_slice(&buf).ok()
}

/// Rolls a d6 `count` times, continuing the generator's rng stream so a seed
/// reproduces both the board and the rolls.
fn roll_d6<R: RandomRange>(count: u32, rng: &mut R) -> Dice {
    let mut dice = Dice::d6();
    for _ in 0..count {
        dice.roll(rng);
    }
    dice
}

fn main() {
    use meap::Parser;
    env_logger::init();
    let Args {
        size,
        rng_seed,
        config_file,
        json,
        arrows,
        roll,
    } = Args::parser().with_help_default().parse_env_or_exit();
    let config = match config_file {
        Some(path) => read_config_file(&path).unwrap_or_else(|| {
            log::warn!("couldn't read config file {} - using defaults", path);
            GeneratorConfig::default()
        }),
        None => GeneratorConfig::default(),
    };
    let rng_seed = rng_seed.unwrap_or_else(|| rand::thread_rng().gen());
    eprintln!("RNG Seed: {}", rng_seed);
    let mut rng = Isaac64Rng::seed_from_u64(rng_seed);
    let map = match Map::generate(&MapSpec { size, config }, &mut rng) {
        Ok(map) => map,
        Err(error) => {
            log::error!("generation failed with seed {}: {}", rng_seed, error);
            eprintln!("{}", error);
            process::exit(1);
        }
    };
    if json {
        match serde_json::to_string(&map) {
            Ok(s) => println!("{}", s),
            Err(error) => {
                eprintln!("{}", error);
                process::exit(1);
            }
        }
    } else {
        print!("{}", render::ascii(&map, arrows));
    }
    if roll > 0 {
        let dice = roll_d6(roll, &mut rng);
        let rolls = dice
            .history()
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>();
        eprintln!("Rolls: {}", rolls.join(" "));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand_range::Scripted;

    #[test]
    fn rolls_are_drawn_from_one_to_six() {
        let mut rng = Scripted::new(vec![6, 1, 4]);
        let dice = roll_d6(3, &mut rng);
        assert_eq!(dice.history(), &[6, 1, 4]);
        assert_eq!(dice.last(), Some(4));
        assert_eq!(roll_d6(0, &mut rng).history(), &[] as &[u32]);
    }

    #[test]
    fn same_seed_same_rolls() {
        let a = roll_d6(8, &mut Isaac64Rng::seed_from_u64(7));
        let b = roll_d6(8, &mut Isaac64Rng::seed_from_u64(7));
        assert_eq!(a.history(), b.history());
        assert!(a.history().iter().all(|&n| n >= 1 && n <= 6));
    }
}
