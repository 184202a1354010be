//! Entity-relationship diagram generation for the catalog schema.
//!
//! The schema description is assembled once from the entity metadata and
//! passed around explicitly; rendering is an explicit build step, not a
//! side effect of loading the schema.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use sea_orm::sea_query::ColumnType;
use sea_orm::{ColumnTrait, EntityName, EntityTrait, IdenStatic, Iterable, PrimaryKeyToColumn};

use crate::error::Error;

pub struct ColumnNode {
    pub name: String,
    pub kind: &'static str,
    pub nullable: bool,
    pub primary_key: bool,
}

pub struct TableNode {
    pub name: String,
    pub columns: Vec<ColumnNode>,
}

pub struct ForeignKeyEdge {
    pub from_table: &'static str,
    pub from_column: &'static str,
    pub to_table: &'static str,
}

pub struct SchemaGraph {
    pub tables: Vec<TableNode>,
    pub edges: Vec<ForeignKeyEdge>,
}

fn type_label(column_type: &ColumnType) -> &'static str {
    match column_type {
        ColumnType::TinyInteger
        | ColumnType::SmallInteger
        | ColumnType::Integer
        | ColumnType::BigInteger => "integer",
        ColumnType::Date => "date",
        _ => "text",
    }
}

fn table_node<E: EntityTrait>(table: E) -> TableNode {
    let primary_keys: Vec<&str> = E::PrimaryKey::iter()
        .map(|key| key.into_column().as_str())
        .collect();

    let columns = E::Column::iter()
        .map(|column| {
            let def = column.def();

            ColumnNode {
                name: column.as_str().to_string(),
                kind: type_label(def.get_column_type()),
                nullable: def.is_null(),
                primary_key: primary_keys.contains(&column.as_str()),
            }
        })
        .collect();

    TableNode {
        name: table.table_name().to_string(),
        columns,
    }
}

impl SchemaGraph {
    /// Assembles the full catalog schema: every table with its columns, and
    /// every foreign-key edge between them.
    pub fn catalog() -> Self {
        let tables = vec![
            table_node(entity::planet::Entity),
            table_node(entity::species::Entity),
            table_node(entity::persona::Entity),
            table_node(entity::user::Entity),
            table_node(entity::favorites::Entity),
            table_node(entity::starship::Entity),
            table_node(entity::vehicle::Entity),
            table_node(entity::film::Entity),
            table_node(entity::starship_pilot::Entity),
            table_node(entity::vehicle_pilot::Entity),
            table_node(entity::film_character::Entity),
            table_node(entity::film_planet::Entity),
            table_node(entity::film_starship::Entity),
            table_node(entity::film_vehicle::Entity),
        ];

        // One entry per belongs_to relation declared in the entity crate; a
        // unit test checks the list against the introspected tables so it
        // cannot drift from the schema.
        let edges = vec![
            edge("species", "homeworld_id", "planet"),
            edge("persona", "homeworld_id", "planet"),
            edge("persona", "species_id", "species"),
            edge("favorites", "user_id", "user"),
            edge("favorites", "planet_id", "planet"),
            edge("favorites", "person_id", "persona"),
            edge("starship_pilot", "starship_id", "starship"),
            edge("starship_pilot", "persona_id", "persona"),
            edge("vehicle_pilot", "vehicle_id", "vehicle"),
            edge("vehicle_pilot", "persona_id", "persona"),
            edge("film_character", "film_id", "film"),
            edge("film_character", "persona_id", "persona"),
            edge("film_planet", "film_id", "film"),
            edge("film_planet", "planet_id", "planet"),
            edge("film_starship", "film_id", "film"),
            edge("film_starship", "starship_id", "starship"),
            edge("film_vehicle", "film_id", "film"),
            edge("film_vehicle", "vehicle_id", "vehicle"),
        ];

        Self { tables, edges }
    }

    /// Renders the graph in GraphViz DOT form, one record node per table.
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph holocron {\n");
        dot.push_str("    rankdir=LR;\n");
        dot.push_str("    node [shape=record, fontname=\"Helvetica\", fontsize=10];\n");

        for table in &self.tables {
            let mut fields = vec![table.name.clone()];

            for column in &table.columns {
                let mut line = format!("{}: {}", column.name, column.kind);
                if column.primary_key {
                    line.push_str(" [pk]");
                } else if !column.nullable {
                    line.push_str(" [nn]");
                }
                fields.push(line);
            }

            dot.push_str(&format!(
                "    \"{}\" [label=\"{}\"];\n",
                table.name,
                fields.join("|")
            ));
        }

        for edge in &self.edges {
            dot.push_str(&format!(
                "    \"{}\" -> \"{}\" [label=\"{}\"];\n",
                edge.from_table, edge.to_table, edge.from_column
            ));
        }

        dot.push_str("}\n");
        dot
    }

    /// Pipes the DOT output through graphviz to produce a PNG at `path`.
    pub fn render_png(&self, path: &Path) -> Result<(), Error> {
        let mut child = Command::new("dot")
            .arg("-Tpng")
            .arg("-o")
            .arg(path)
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => Error::GraphvizNotFound,
                _ => Error::Io(e),
            })?;

        child
            .stdin
            .as_mut()
            .expect("stdin was piped")
            .write_all(self.to_dot().as_bytes())?;

        let status = child.wait()?;
        if !status.success() {
            return Err(Error::GraphvizFailed(status));
        }

        Ok(())
    }
}

fn edge(
    from_table: &'static str,
    from_column: &'static str,
    to_table: &'static str,
) -> ForeignKeyEdge {
    ForeignKeyEdge {
        from_table,
        from_column,
        to_table,
    }
}

#[cfg(test)]
mod tests {
    use super::SchemaGraph;

    #[test]
    fn catalog_lists_every_table() {
        let graph = SchemaGraph::catalog();

        let names: Vec<&str> = graph.tables.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(names.len(), 14);
        for expected in [
            "planet",
            "species",
            "persona",
            "user",
            "favorites",
            "starship",
            "vehicle",
            "film",
            "starship_pilot",
            "vehicle_pilot",
            "film_character",
            "film_planet",
            "film_starship",
            "film_vehicle",
        ] {
            assert!(names.contains(&expected), "missing table {expected}");
        }
    }

    #[test]
    fn edges_reference_declared_tables_and_columns() {
        let graph = SchemaGraph::catalog();

        for edge in &graph.edges {
            let from = graph
                .tables
                .iter()
                .find(|t| t.name == edge.from_table)
                .unwrap_or_else(|| panic!("unknown source table {}", edge.from_table));

            assert!(
                from.columns.iter().any(|c| c.name == edge.from_column),
                "column {}.{} not declared",
                edge.from_table,
                edge.from_column
            );
            assert!(
                graph.tables.iter().any(|t| t.name == edge.to_table),
                "unknown target table {}",
                edge.to_table
            );
        }
    }

    #[test]
    fn join_tables_use_composite_primary_keys() {
        let graph = SchemaGraph::catalog();

        let film_character = graph
            .tables
            .iter()
            .find(|t| t.name == "film_character")
            .unwrap();

        assert!(film_character.columns.iter().all(|c| c.primary_key));
        assert_eq!(film_character.columns.len(), 2);
    }

    #[test]
    fn dot_output_contains_nodes_and_edges() {
        let dot = SchemaGraph::catalog().to_dot();

        assert!(dot.contains("\"planet\" [label=\"planet|id: integer [pk]|name: text [nn]|"));
        assert!(dot.contains("\"species\" -> \"planet\" [label=\"homeworld_id\"];"));
        assert!(dot.contains("\"film_character\" -> \"film\" [label=\"film_id\"];"));
    }
}
