use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

pub fn cinerec() -> Command {
    let mut cmd = cargo_bin_cmd!("cinerec");
    // Keep tests offline regardless of the host environment
    cmd.env_remove("TMDB_API_KEY");
    cmd.env_remove("CINEREC_DATA_DIR");
    cmd
}

fn names_json(names: &[&str]) -> String {
    let entries: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| format!(r#"{{"id": {}, "name": "{}"}}"#, i + 1, name))
        .collect();
    format!("[{}]", entries.join(", "))
}

fn crew_json(director: &str) -> String {
    format!(
        r#"[{{"name": "Jane Editor", "job": "Editor"}}, {{"name": "{}", "job": "Director"}}]"#,
        director
    )
}

/// Write a small TMDB-shaped CSV pair into `source_dir`
#[allow(dead_code)]
pub fn write_fixture_csvs(source_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(source_dir)?;

    let movies: &[(&str, &str, &str, &[&str], &[&str])] = &[
        (
            "101",
            "Star Patrol",
            "A space fleet wages war across distant galaxies",
            &["Action", "Science Fiction"],
            &["space war", "fleet"],
        ),
        (
            "102",
            "Battle Beyond",
            "A space fleet fights a desperate war against invaders",
            &["Action", "Science Fiction"],
            &["space war", "invasion"],
        ),
        (
            "103",
            "Dinner Date",
            "A romantic dinner comedy about awkward evenings",
            &["Comedy", "Romance"],
            &["dinner", "dating"],
        ),
        (
            "104",
            "Void Runners",
            "Smugglers race a space fleet through asteroid fields",
            &["Science Fiction", "Adventure"],
            &["space war", "smuggling"],
        ),
        (
            "105",
            "The  Matrix!",
            "A hacker discovers reality itself is an elaborate simulation",
            &["Action", "Science Fiction"],
            &["hacker", "simulation"],
        ),
        (
            "106",
            "Cup Stories",
            "Gentle stories about teacups and crowded kitchens",
            &["Drama"],
            &["kitchen"],
        ),
    ];

    let mut writer = csv::Writer::from_path(source_dir.join("tmdb_5000_movies.csv"))?;
    writer.write_record([
        "id",
        "title",
        "overview",
        "genres",
        "keywords",
        "production_companies",
        "release_date",
        "budget",
        "revenue",
        "runtime",
        "popularity",
        "status",
        "spoken_languages",
        "vote_average",
        "vote_count",
    ])?;
    for (id, title, overview, genres, keywords) in movies {
        writer.write_record([
            *id,
            *title,
            *overview,
            &names_json(genres),
            &names_json(keywords),
            &names_json(&["Fixture Pictures"]),
            "2009-05-29",
            "1000000",
            "5000000",
            "110",
            "42.5",
            "Released",
            &names_json(&["English"]),
            "7.2",
            "980",
        ])?;
    }
    writer.flush()?;

    let mut writer = csv::Writer::from_path(source_dir.join("tmdb_5000_credits.csv"))?;
    writer.write_record(["movie_id", "title", "cast", "crew"])?;
    for (id, title, _, _, _) in movies {
        writer.write_record([
            *id,
            *title,
            &names_json(&["Sam Worthington", "Zoe Saldana"]),
            &crew_json("James Cameron"),
        ])?;
    }
    writer.flush()?;

    Ok(())
}
