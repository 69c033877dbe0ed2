/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FloorSequence {
    pub floors: Vec<u8>,
}

impl FloorSequence {
    pub fn new() -> FloorSequence {
        FloorSequence { floors: Vec::new() }
    }

    pub fn push(&mut self, floor: u8) {
        self.floors.push(floor);
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.floors
    }
}

impl fmt::Display for FloorSequence {
    // Renders the floors as a comma-separated list, no spaces
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let joined = self
            .floors
            .iter()
            .map(|floor| floor.to_string())
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{}", joined)
    }
}
