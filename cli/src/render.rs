use sugoroku_procgen::{CardinalDirection, CellKind, Coord, Map};

fn arrow(direction: CardinalDirection) -> char {
    match direction {
        CardinalDirection::North => '↑',
        CardinalDirection::East => '→',
        CardinalDirection::South => '↓',
        CardinalDirection::West => '←',
    }
}

fn cell_char(map: &Map, coord: Coord, arrows: bool) -> char {
    let cell = match map.cell(coord) {
        Some(cell) => cell,
        None => return ' ',
    };
    match cell.kind {
        CellKind::Start => '@',
        CellKind::Goal => '>',
        CellKind::Wall => '█',
        CellKind::Passage | CellKind::Branch if arrows && cell.legal_directions.len() == 1 => {
            cell.legal_directions.first().map(arrow).unwrap_or('?')
        }
        CellKind::Passage => '.',
        CellKind::Branch => '+',
    }
}

pub fn ascii(map: &Map, arrows: bool) -> String {
    let size = map.size();
    let mut out = String::from("    ");
    for x in 0..size.width() {
        out.push(std::char::from_digit(x % 10, 10).unwrap_or(' '));
    }
    out.push('\n');
    for y in 0..size.height() {
        out.push_str(&format!("{:2}: ", y));
        for x in 0..size.width() {
            out.push(cell_char(map, Coord::new(x as i32, y as i32), arrows));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand_isaac::Isaac64Rng;
    use sugoroku_procgen::MapSpec;

    fn some_map() -> Map {
        let spec = MapSpec::new(12, 9);
        (0..16)
            .filter_map(|seed| Map::generate(&spec, &mut Isaac64Rng::seed_from_u64(seed)).ok())
            .next()
            .expect("no map generated")
    }

    #[test]
    fn one_row_per_line_plus_header() {
        let map = some_map();
        let text = ascii(&map, false);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "    012345678901");
        assert!(lines[1..].iter().all(|line| line.chars().count() == 4 + 12));
        assert_eq!(text.matches('@').count(), 1);
        assert_eq!(text.matches('>').count(), 1);
    }

    #[test]
    fn arrows_replace_single_direction_passages() {
        let map = some_map();
        let path = map.path();
        let first_step = path[1];
        let expected = arrow(map.legal_directions(first_step).first().unwrap());
        let shown = cell_char(&map, first_step, true);
        if map.legal_directions(first_step).len() == 1 {
            assert_eq!(shown, expected);
        } else {
            assert_eq!(shown, '.');
        }
        assert_eq!(cell_char(&map, first_step, false), '.');
        assert_eq!(cell_char(&map, map.start(), true), '@');
    }
}
