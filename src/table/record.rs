/// Census count for a single decade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CensusRecord {
    pub year: i32,
    pub population: f64,
}

impl CensusRecord {
    pub fn new(year: i32, population: f64) -> Self {
        Self { year, population }
    }

    /// `<year> <population>`
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let (Some(year), Some(population), None) = (fields.next(), fields.next(), fields.next())
        else {
            return None;
        };
        let year = year.parse::<i32>().ok()?;
        let population = population.parse::<f64>().ok()?;
        population
            .is_finite()
            .then_some(Self::new(year, population))
    }
}
