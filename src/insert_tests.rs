#[cfg(test)]
mod tests {
    use crate::dialect::Dialect;
    use crate::filter::Operand;
    use crate::insert::Insert;
    use crate::parameter::Parameter;
    use crate::select::Select;
    use crate::statement::{Error, Statement};
    use crate::table::Table;
    use pretty_assertions::assert_eq;

    #[test]
    fn values_without_columns() {
        let t = Table::new("user");
        let q = Insert::into_table(&t).values([1_i64.into(), Operand::from("foo")]);
        assert_eq!(
            q.build(&Dialect::generic()).unwrap().sql,
            "INSERT INTO user VALUES (1, 'foo')"
        );
    }

    #[test]
    fn columns_and_values() {
        let t = Table::new("user");
        let q = Insert::into_table(&t)
            .columns([t.col("id"), t.col("name")])
            .values([Operand::from(1_i64), "foo".into()]);
        assert_eq!(
            q.build(&Dialect::generic()).unwrap().sql,
            "INSERT INTO user (id, name) VALUES (1, 'foo')"
        );
    }

    #[test]
    fn multi_row_insert() {
        let t = Table::new("user");
        let q = Insert::into_table(&t)
            .columns([t.col("id"), t.col("name")])
            .values([Operand::from(1_i64), "foo".into()])
            .values([Operand::from(2_i64), "bar".into()]);
        assert_eq!(
            q.build(&Dialect::generic()).unwrap().sql,
            "INSERT INTO user (id, name) VALUES (1, 'foo'), (2, 'bar')"
        );
    }

    #[test]
    fn single_row_count_mismatch() {
        let t = Table::new("user");
        let q = Insert::into_table(&t)
            .columns([t.col("a"), t.col("b")])
            .values([Operand::from(1_i64), 2_i64.into(), 3_i64.into()]);
        assert_eq!(
            q.build(&Dialect::generic()),
            Err(Error::Syntax(
                "Values count doesn't match column count. ".to_string()
            ))
        );
    }

    #[test]
    fn multi_row_mismatches_report_zero_based_row_numbers() {
        let t = Table::new("user");
        let q = Insert::into_table(&t)
            .columns([t.col("a"), t.col("b")])
            .values([Operand::from(1_i64)])
            .values([Operand::from(1_i64), 2_i64.into()])
            .values([Operand::from(1_i64), 2_i64.into(), 3_i64.into()]);
        assert_eq!(
            q.build(&Dialect::generic()),
            Err(Error::Syntax(
                "Values count doesn't match column count in row number 0. \
                 Values count doesn't match column count in row number 2. "
                    .to_string()
            ))
        );
    }

    #[test]
    fn insert_select() {
        let user = Table::new("user");
        let staging = Table::new("staging");
        let q = Insert::into_table(&user)
            .columns([user.col("id"), user.col("name")])
            .query(Select::from(&staging).fields([staging.col("id"), staging.col("name")]));
        assert_eq!(
            q.build(&Dialect::generic()).unwrap().sql,
            "INSERT INTO user (id, name) SELECT staging.id, staging.name FROM staging"
        );
    }

    #[test]
    fn insert_select_projection_mismatch() {
        let user = Table::new("user");
        let staging = Table::new("staging");
        let q = Insert::into_table(&user)
            .columns([user.col("id"), user.col("name")])
            .query(Select::from(&staging).fields([staging.col("id")]));
        assert_eq!(
            q.build(&Dialect::generic()),
            Err(Error::Syntax(
                "Select column count doesn't match column count. ".to_string()
            ))
        );
    }

    #[test]
    fn values_and_query_conflict() {
        let user = Table::new("user");
        let staging = Table::new("staging");
        let q = Insert::into_table(&user)
            .values([Operand::from(1_i64)])
            .query(Select::from(&staging));
        assert_eq!(
            q.build(&Dialect::generic()),
            Err(Error::Syntax("Conflicting insert sources. ".to_string()))
        );
    }

    #[test]
    fn insert_without_source_is_rejected() {
        let t = Table::new("user");
        let q = Insert::into_table(&t).columns([t.col("id")]);
        assert_eq!(
            q.build(&Dialect::generic()),
            Err(Error::Syntax("Empty values clause. ".to_string()))
        );
    }

    #[test]
    fn returning_clause() {
        let t = Table::new("user");
        let q = Insert::into_table(&t)
            .columns([t.col("name")])
            .values([Operand::from("foo")])
            .returning([t.col("id")]);
        assert_eq!(
            q.build(&Dialect::generic()).unwrap().sql,
            "INSERT INTO user (name) VALUES ('foo') RETURNING user.id"
        );
    }

    #[test]
    fn positional_parameters_are_numbered_in_value_order() {
        let t = Table::new("user");
        let q = Insert::into_table(&t)
            .columns([t.col("a"), t.col("b"), t.col("c")])
            .values([
                Operand::from(Parameter::new()),
                Parameter::new().into(),
                Parameter::new().into(),
            ]);
        let rendered = q.build(&Dialect::sqlite()).unwrap();
        assert_eq!(
            rendered.sql,
            "INSERT INTO user (a, b, c) VALUES (?1, ?2, ?3)"
        );
        assert_eq!(rendered.parameters.len(), 3);
    }

    #[test]
    fn named_parameter_is_not_numbered() {
        let t = Table::new("user");
        let q = Insert::into_table(&t)
            .columns([t.col("a"), t.col("b")])
            .values([
                Operand::from(Parameter::new()),
                Parameter::named("name").into(),
            ]);
        let rendered = q.build(&Dialect::sqlite()).unwrap();
        assert_eq!(rendered.sql, "INSERT INTO user (a, b) VALUES (?1, @name)");
        assert_eq!(
            rendered.parameters,
            vec![Parameter::new(), Parameter::named("name")]
        );
    }
}
