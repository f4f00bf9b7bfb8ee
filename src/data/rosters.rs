//! The league's drafted rosters.
//!
//! Names are the display names used on the stats page; several are partial
//! ("Jake", "Porel") because lookups match on substrings.

use crate::domain::{Rosters, TeamRoster};

const TEAM_ANIRUDH: &[&str] = &[
    "Tilak Varma", "Noor Ahmad", "Ishan Kishan", "Pat Cummins", "Sunil Narine",
    "Heinrich Klaasen", "Rashid Khan", "Krunal Pandya", "Ravindra Jadeja", "Shivam Dube",
    "Mitchell Santner", "Glenn Phillips", "Wanindu Hasaranga", "Ajinkya Rahane", "Nitish Kumar R",
];

const TEAM_BHANU: &[&str] = &[
    "Mohammed Siraj", "Josh Hazlewood", "Mitchell Marsh", "Shardul Thakur", "Andre Russell",
    "Liam Livingstone", "Rishabh Pant", "Shreyas Iyer", "Ashwani", "Quinton de Kock",
    "Priyansh Arya", "Jitesh Sharma", "Marcus Stoinis", "Aniket Verma", "Vipraj",
    "Ryan Rickelton", "Sai Kishore", "Kagiso Rabada",
];

const TEAM_SATYA: &[&str] = &[
    "Trent Boult", "Abhishek Sharma", "Raghuvanshi", "Glenn Maxwell", "Yashasvi Jaiswal",
    "Phil Salt", "Shubman Gill", "Hardik Pandya", "Kuldeep Yadav", "Jasprit Bumrah",
    "Mitchell Starc", "Sanju Samson", "Jos Buttler", "Tristan Stubbs", "Prabhsimran Singh",
    "Jofra Archer", "Sherfane Rutherford", "Prince Yadav",
];

const TEAM_SUNNY: &[&str] = &[
    "Rajat Patidar", "Tim David", "Riyan Parag", "Nicholas Pooran", "KL Rahul",
    "Sai Sudharsan", "Mohammed Shami", "Ravichandran Ashwin", "Moeen Ali", "Jake",
    "Harshal Patel", "Axar Patel", "Venkatesh Iyer", "Omarzai", "Maheesh Theekshana",
    "Simarjeet Singh", "Sameer Rizvi", "Vignesh Puth",
];

const TEAM_SURESH: &[&str] = &[
    "Nitish Rana", "Ravi Bishnoi", "Virat Kohli", "Travis Head", "Matheesha Pathirana",
    "Shahrukh Khan", "Varun Chakravarthy", "Yash Dayal", "Rahul Tripathi", "Ayush Badoni",
    "Faf du Plessis", "Aiden Markram", "Rinku Singh", "Dhruv Jurel", "Marco Jansen",
    "Adam Zampa", "Arshdeep Singh", "Porel",
];

const TEAM_TRIVEDH: &[&str] = &[
    "Rachin Ravindra", "Ruturaj Gaikwad", "Will Jacks", "MS Dhoni", "Shahbaz Ahmed",
    "Suryakumar Yadav", "Harshit Rana", "Suyash Sharma", "David Miller", "Rohit Sharma",
    "Khaleel Ahmed", "Yuzvendra Chahal", "Ashutosh Sharma", "Prasidh Krishna", "Bhuvneshwar Kumar",
    "Devdutt Padikkal", "Deepak Chahar", "Shimron Hetmyer",
];

/// The six league rosters in report order.
pub fn default_rosters() -> Rosters {
    Rosters::new(vec![
        TeamRoster::new("Team Anirudh", TEAM_ANIRUDH.iter().copied()),
        TeamRoster::new("Team Bhanu", TEAM_BHANU.iter().copied()),
        TeamRoster::new("Team Satya", TEAM_SATYA.iter().copied()),
        TeamRoster::new("Team Sunny", TEAM_SUNNY.iter().copied()),
        TeamRoster::new("Team Suresh", TEAM_SURESH.iter().copied()),
        TeamRoster::new("Team Trivedh", TEAM_TRIVEDH.iter().copied()),
    ])
}
