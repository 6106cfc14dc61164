#[cfg(test)]
mod tests {
    use crate::dialect::Dialect;
    use crate::statement::{Error, Statement};
    use crate::table::{Column, ColumnRef, SqlType, Table};
    use pretty_assertions::assert_eq;

    #[test]
    fn col_is_bound_to_the_table_label() {
        let t = Table::new("user");
        let c = t.col("id");
        assert_eq!(c.render().unwrap(), "user.id");
    }

    #[test]
    fn aliased_copy_binds_columns_to_the_alias() {
        let t = Table::new("user");
        let a = t.as_alias("u");
        assert_eq!(a.label(), "u");
        assert_eq!(a.col("id").render().unwrap(), "u.id");
        // 原表不受影响
        assert_eq!(t.col("id").render().unwrap(), "user.id");
    }

    #[test]
    fn from_clause_includes_alias() {
        let t = Table::new("user");
        assert_eq!(t.from_clause(), "user");
        assert_eq!(t.as_alias("u").from_clause(), "user AS u");
    }

    #[test]
    fn unbound_column_render_is_an_error() {
        let c = ColumnRef::unbound("ghost");
        assert_eq!(c.render(), Err(Error::UnboundColumn("ghost".to_string())));
    }

    #[test]
    fn second_composite_primary_key_declaration_conflicts() {
        let t = Table::new("t")
            .column(Column::new("a", SqlType::Int))
            .column(Column::new("b", SqlType::Int));
        let t = t
            .clone()
            .primary_key([t.col("a")])
            .primary_key([t.col("b")]);
        assert_eq!(
            t.create().build(&Dialect::generic()),
            Err(Error::Syntax(
                "Conflicting definitions of primary key. ".to_string()
            ))
        );
    }

    #[test]
    fn exact_duplicate_foreign_keys_are_dropped_silently() {
        let other = Table::new("other");
        let t = Table::new("t")
            .column(Column::new("a", SqlType::Int))
            .column(Column::new("b", SqlType::Int));
        let t = t
            .clone()
            .foreign_key([t.col("a"), t.col("b")], [other.col("x"), other.col("y")])
            .foreign_key([t.col("b"), t.col("a")], [other.col("y"), other.col("x")])
            .foreign_key([t.col("a")], [other.col("x")]);
        assert_eq!(t.foreign_keys.len(), 2);
    }

    #[test]
    fn reordered_composite_keys_count_as_duplicates() {
        let other = Table::new("other");
        let t = Table::new("t")
            .column(Column::new("a", SqlType::Int))
            .column(Column::new("b", SqlType::Int));
        let t = t
            .clone()
            .foreign_key([t.col("a"), t.col("b")], [other.col("x"), other.col("y")])
            .foreign_key([t.col("a"), t.col("b")], [other.col("y"), other.col("x")]);
        // 复合键按集合比较，与列顺序无关
        assert_eq!(t.foreign_keys.len(), 1);
    }

    #[test]
    fn column_metadata_is_carried() {
        let c = Column::new("name", SqlType::Varchar)
            .length(32)
            .not_null()
            .unique()
            .default_value("anon")
            .check("length(name) > 0")
            .collate("NOCASE");
        let t = Table::new("user").column(c);
        let sql = t.create().build(&Dialect::generic()).unwrap().sql;
        assert_eq!(
            sql,
            "CREATE TABLE user (name varchar(32) NOT NULL UNIQUE DEFAULT 'anon' \
             CHECK (length(name) > 0) COLLATE NOCASE)"
        );
    }
}
