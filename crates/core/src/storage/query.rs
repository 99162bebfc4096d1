//! Owner-scoped statement builder.
//!
//! Every statement built through an [`OwnerScope`] carries the owner
//! predicate: selects, updates and deletes always end their WHERE clause
//! with `username = ?N`, and inserts always write the owner column. Table
//! and column names are `&'static str`, so only values ever become
//! parameters.

use super::{SqlValue, Statement};

/// Column holding the owning username on every scoped table.
pub const OWNER_COLUMN: &str = "username";

/// The capability to build statements for one user's rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerScope {
    username: String,
}

impl OwnerScope {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn select(&self, table: &'static str, columns: &'static str) -> Select<'_> {
        Select {
            scope: self,
            table,
            columns,
            filters: Vec::new(),
            order_by: None,
        }
    }

    pub fn update(&self, table: &'static str) -> Update<'_> {
        Update {
            scope: self,
            table,
            assignments: Vec::new(),
            filters: Vec::new(),
        }
    }

    pub fn delete(&self, table: &'static str) -> Delete<'_> {
        Delete {
            scope: self,
            table,
            filters: Vec::new(),
        }
    }

    pub fn insert(&self, table: &'static str) -> Insert<'_> {
        Insert {
            scope: self,
            table,
            values: Vec::new(),
            parent: None,
        }
    }
}

/// Accumulates parameters and hands out their positional placeholders.
#[derive(Default)]
struct Params(Vec<SqlValue>);

impl Params {
    fn push(&mut self, value: SqlValue) -> String {
        self.0.push(value);
        format!("?{}", self.0.len())
    }
}

type Filter = (&'static str, SqlValue);

fn where_clause(params: &mut Params, filters: Vec<Filter>, owner: &str) -> String {
    let mut conditions: Vec<String> = filters
        .into_iter()
        .map(|(column, value)| format!("{column} = {}", params.push(value)))
        .collect();
    conditions.push(format!(
        "{OWNER_COLUMN} = {}",
        params.push(SqlValue::from(owner))
    ));
    conditions.join(" AND ")
}

pub struct Select<'a> {
    scope: &'a OwnerScope,
    table: &'static str,
    columns: &'static str,
    filters: Vec<Filter>,
    order_by: Option<&'static str>,
}

impl Select<'_> {
    pub fn filter(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.filters.push((column, value.into()));
        self
    }

    pub fn order_by(mut self, expr: &'static str) -> Self {
        self.order_by = Some(expr);
        self
    }

    pub fn build(self) -> Statement {
        let mut params = Params::default();
        let conditions = where_clause(&mut params, self.filters, self.scope.username());
        let mut sql = format!(
            "SELECT {} FROM {} WHERE {conditions}",
            self.columns, self.table
        );
        if let Some(order) = self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }
        Statement::new(sql, params.0)
    }
}

enum Assignment {
    Value(&'static str, SqlValue),
    Expr(&'static str),
}

pub struct Update<'a> {
    scope: &'a OwnerScope,
    table: &'static str,
    assignments: Vec<Assignment>,
    filters: Vec<Filter>,
}

impl Update<'_> {
    /// Assigns a parameter to a column.
    pub fn set(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.assignments.push(Assignment::Value(column, value.into()));
        self
    }

    /// Adds a literal assignment such as `done = NOT done`.
    pub fn set_expr(mut self, expr: &'static str) -> Self {
        self.assignments.push(Assignment::Expr(expr));
        self
    }

    pub fn filter(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.filters.push((column, value.into()));
        self
    }

    pub fn build(self) -> Statement {
        let mut params = Params::default();
        let assignments: Vec<String> = self
            .assignments
            .into_iter()
            .map(|assignment| match assignment {
                Assignment::Value(column, value) => format!("{column} = {}", params.push(value)),
                Assignment::Expr(expr) => expr.to_string(),
            })
            .collect();
        let conditions = where_clause(&mut params, self.filters, self.scope.username());
        let sql = format!(
            "UPDATE {} SET {} WHERE {conditions}",
            self.table,
            assignments.join(", ")
        );
        Statement::new(sql, params.0)
    }
}

pub struct Delete<'a> {
    scope: &'a OwnerScope,
    table: &'static str,
    filters: Vec<Filter>,
}

impl Delete<'_> {
    pub fn filter(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.filters.push((column, value.into()));
        self
    }

    pub fn build(self) -> Statement {
        let mut params = Params::default();
        let conditions = where_clause(&mut params, self.filters, self.scope.username());
        let sql = format!("DELETE FROM {} WHERE {conditions}", self.table);
        Statement::new(sql, params.0)
    }
}

struct Parent {
    table: &'static str,
    foreign_key: &'static str,
    id: SqlValue,
}

pub struct Insert<'a> {
    scope: &'a OwnerScope,
    table: &'static str,
    values: Vec<(&'static str, SqlValue)>,
    parent: Option<Parent>,
}

impl Insert<'_> {
    pub fn value(mut self, column: &'static str, value: impl Into<SqlValue>) -> Self {
        self.values.push((column, value.into()));
        self
    }

    /// Requires the parent row `parent_table.id = parent_id` to belong to the
    /// same owner. When it does not, the insert affects no rows.
    pub fn under_parent(
        mut self,
        parent_table: &'static str,
        foreign_key: &'static str,
        parent_id: impl Into<SqlValue>,
    ) -> Self {
        self.parent = Some(Parent {
            table: parent_table,
            foreign_key,
            id: parent_id.into(),
        });
        self
    }

    pub fn build(self) -> Statement {
        let mut params = Params::default();
        let mut columns: Vec<&str> = Vec::with_capacity(self.values.len() + 2);
        let mut placeholders: Vec<String> = Vec::with_capacity(self.values.len());

        for (column, value) in self.values {
            columns.push(column);
            placeholders.push(params.push(value));
        }

        let sql = match self.parent {
            None => {
                columns.push(OWNER_COLUMN);
                placeholders.push(params.push(SqlValue::from(self.scope.username())));
                format!(
                    "INSERT INTO {} ({}) VALUES ({})",
                    self.table,
                    columns.join(", "),
                    placeholders.join(", ")
                )
            }
            Some(parent) => {
                columns.push(parent.foreign_key);
                columns.push(OWNER_COLUMN);
                placeholders.push("id".to_string());
                placeholders.push(OWNER_COLUMN.to_string());
                let conditions =
                    where_clause(&mut params, vec![("id", parent.id)], self.scope.username());
                format!(
                    "INSERT INTO {} ({}) SELECT {} FROM {} WHERE {conditions}",
                    self.table,
                    columns.join(", "),
                    placeholders.join(", "),
                    parent.table
                )
            }
        };

        Statement::new(sql, params.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> OwnerScope {
        OwnerScope::new("alice")
    }

    #[test]
    fn test_select_appends_owner_filter_last() {
        let statement = alice()
            .select("todos", "*")
            .filter("todolist_id", 3)
            .order_by("done, lower(title)")
            .build();

        assert_eq!(
            statement.sql,
            "SELECT * FROM todos WHERE todolist_id = ?1 AND username = ?2 ORDER BY done, lower(title)"
        );
        assert_eq!(
            statement.params,
            vec![SqlValue::Integer(3), SqlValue::from("alice")]
        );
    }

    #[test]
    fn test_select_without_filters_still_scoped() {
        let statement = alice().select("todolists", "id, title").build();

        assert_eq!(
            statement.sql,
            "SELECT id, title FROM todolists WHERE username = ?1"
        );
        assert_eq!(statement.params, vec![SqlValue::from("alice")]);
    }

    #[test]
    fn test_update_numbers_assignments_before_filters() {
        let statement = alice()
            .update("todolists")
            .set("title", "Errands")
            .filter("id", 9)
            .build();

        assert_eq!(
            statement.sql,
            "UPDATE todolists SET title = ?1 WHERE id = ?2 AND username = ?3"
        );
        assert_eq!(
            statement.params,
            vec![
                SqlValue::from("Errands"),
                SqlValue::Integer(9),
                SqlValue::from("alice")
            ]
        );
    }

    #[test]
    fn test_update_with_expression() {
        let statement = alice()
            .update("todos")
            .set_expr("done = NOT done")
            .filter("todolist_id", 1)
            .filter("id", 2)
            .build();

        assert_eq!(
            statement.sql,
            "UPDATE todos SET done = NOT done WHERE todolist_id = ?1 AND id = ?2 AND username = ?3"
        );
    }

    #[test]
    fn test_delete_is_scoped() {
        let statement = alice().delete("todolists").filter("id", 5).build();

        assert_eq!(
            statement.sql,
            "DELETE FROM todolists WHERE id = ?1 AND username = ?2"
        );
        assert_eq!(
            statement.params,
            vec![SqlValue::Integer(5), SqlValue::from("alice")]
        );
    }

    #[test]
    fn test_insert_writes_owner_column() {
        let statement = alice().insert("todolists").value("title", "Groceries").build();

        assert_eq!(
            statement.sql,
            "INSERT INTO todolists (title, username) VALUES (?1, ?2)"
        );
        assert_eq!(
            statement.params,
            vec![SqlValue::from("Groceries"), SqlValue::from("alice")]
        );
    }

    #[test]
    fn test_insert_under_parent_requires_owned_parent() {
        let statement = alice()
            .insert("todos")
            .value("title", "Milk")
            .under_parent("todolists", "todolist_id", 7)
            .build();

        assert_eq!(
            statement.sql,
            "INSERT INTO todos (title, todolist_id, username) \
             SELECT ?1, id, username FROM todolists WHERE id = ?2 AND username = ?3"
        );
        assert_eq!(
            statement.params,
            vec![
                SqlValue::from("Milk"),
                SqlValue::Integer(7),
                SqlValue::from("alice")
            ]
        );
    }

    #[test]
    fn test_owner_value_is_a_parameter_not_sql() {
        let scope = OwnerScope::new("x' OR '1'='1");
        let statement = scope.select("todos", "*").build();

        assert_eq!(statement.sql, "SELECT * FROM todos WHERE username = ?1");
        assert_eq!(statement.params, vec![SqlValue::from("x' OR '1'='1")]);
    }
}
