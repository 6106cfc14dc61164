#[cfg(test)]
mod tests {
    use crate::dialect::Dialect;
    use crate::field::{count_all, ucase};
    use crate::select::{Order, Select};
    use crate::statement::{Error, Statement};
    use crate::table::Table;
    use pretty_assertions::assert_eq;

    fn sql(q: &Select, d: &Dialect) -> String {
        q.build(d).unwrap().sql
    }

    #[test]
    fn bare_select_renders_star() {
        let t = Table::new("user");
        assert_eq!(sql(&Select::from(&t), &Dialect::generic()), "SELECT * FROM user");
    }

    #[test]
    fn bare_select_is_dialect_independent() {
        let t = Table::new("user");
        let q = Select::from(&t);
        assert_eq!(sql(&q, &Dialect::generic()), "SELECT * FROM user");
        assert_eq!(sql(&q, &Dialect::postgresql()), "SELECT * FROM user");
        assert_eq!(sql(&q, &Dialect::sqlite()), "SELECT * FROM user");
    }

    #[test]
    fn fields_render_in_order() {
        let t = Table::new("user");
        let q = Select::from(&t).fields([t.col("id"), t.col("name")]);
        assert_eq!(
            sql(&q, &Dialect::generic()),
            "SELECT user.id, user.name FROM user"
        );
    }

    #[test]
    fn where_or_limit_scenario() {
        let t = Table::new("T");
        let q = Select::from(&t)
            .where_(t.col("a").eq("banana").or(t.col("a").eq("apple")))
            .limit(3);
        assert_eq!(
            sql(&q, &Dialect::generic()),
            "SELECT * FROM T WHERE (T.a = 'banana') OR (T.a = 'apple') LIMIT 3"
        );
    }

    #[test]
    fn distinct_flag() {
        let t = Table::new("user");
        let q = Select::from(&t).fields([t.col("city")]).distinct();
        assert_eq!(
            sql(&q, &Dialect::generic()),
            "SELECT DISTINCT user.city FROM user"
        );
    }

    #[test]
    fn multi_table_from() {
        let a = Table::new("a");
        let b = Table::new("b");
        let q = Select::from_tables([&a, &b]).where_(a.col("id").eq(b.col("a_id")));
        assert_eq!(
            sql(&q, &Dialect::generic()),
            "SELECT * FROM a, b WHERE a.id = b.a_id"
        );
    }

    #[test]
    fn join_with_on() {
        let user = Table::new("user");
        let order = Table::new("order");
        let q = Select::from(&user)
            .join(&order)
            .on(user.col("id").eq(order.col("user_id")));
        assert_eq!(
            sql(&q, &Dialect::generic()),
            "SELECT * FROM user JOIN order ON user.id = order.user_id"
        );
    }

    #[test]
    fn join_with_using() {
        let user = Table::new("user");
        let order = Table::new("order");
        let q = Select::from(&user)
            .join(&order)
            .using([user.col("tenant_id"), user.col("region")]);
        assert_eq!(
            sql(&q, &Dialect::generic()),
            "SELECT * FROM user JOIN order USING (tenant_id, region)"
        );
    }

    #[test]
    fn self_join_through_alias() {
        let user = Table::new("user");
        let manager = user.as_alias("m");
        let q = Select::from(&user)
            .fields([user.col("name"), manager.col("name")])
            .join(&manager)
            .on(user.col("manager_id").eq(manager.col("id")));
        assert_eq!(
            sql(&q, &Dialect::generic()),
            "SELECT user.name, m.name FROM user JOIN user AS m ON user.manager_id = m.id"
        );
    }

    #[test]
    fn group_by_having_order_by_offset() {
        let t = Table::new("order");
        let q = Select::from(&t)
            .fields([t.col("city").into(), count_all().alias("n")])
            .group_by([t.col("city")])
            .having(count_all().gt(10_i64))
            .order_by([(ucase(t.col("city")), Order::Asc), (count_all(), Order::Desc)])
            .limit(5)
            .offset(10);
        assert_eq!(
            sql(&q, &Dialect::generic()),
            "SELECT order.city, COUNT(*) AS n FROM order GROUP BY order.city \
             HAVING COUNT(*) > 10 ORDER BY UCASE(order.city) ASC, COUNT(*) DESC \
             LIMIT 5 OFFSET 10"
        );
    }

    #[test]
    fn raw_where_and_raw_having() {
        let t = Table::new("user");
        let q = Select::from(&t)
            .where_raw("age > 18")
            .group_by([t.col("city")])
            .having_raw("COUNT(*) > 1");
        assert_eq!(
            sql(&q, &Dialect::generic()),
            "SELECT * FROM user WHERE age > 18 GROUP BY user.city HAVING COUNT(*) > 1"
        );
    }

    #[test]
    fn second_where_is_rejected_not_overwritten() {
        let t = Table::new("user");
        let q = Select::from(&t)
            .where_(t.col("a").eq(1_i64))
            .where_(t.col("b").eq(2_i64));
        assert_eq!(
            q.build(&Dialect::generic()),
            Err(Error::Syntax("Multiple where clauses. ".to_string()))
        );
    }

    #[test]
    fn typed_and_raw_where_share_one_slot() {
        let t = Table::new("user");
        let q = Select::from(&t).where_raw("a = 1").where_(t.col("b").eq(2_i64));
        assert_eq!(
            q.build(&Dialect::generic()),
            Err(Error::Syntax("Multiple where clauses. ".to_string()))
        );
    }

    #[test]
    fn on_without_join_is_an_error() {
        let user = Table::new("user");
        let order = Table::new("order");
        let q = Select::from(&user).on(user.col("id").eq(order.col("user_id")));
        assert_eq!(
            q.build(&Dialect::generic()),
            Err(Error::Syntax(
                "On clause set without a join clause. ".to_string()
            ))
        );
    }

    #[test]
    fn on_and_using_conflict() {
        let user = Table::new("user");
        let order = Table::new("order");
        let q = Select::from(&user)
            .join(&order)
            .on(user.col("id").eq(order.col("user_id")))
            .using([user.col("id")]);
        assert_eq!(
            q.build(&Dialect::generic()),
            Err(Error::Syntax(
                "Conflicting on and using clauses. ".to_string()
            ))
        );
    }

    #[test]
    fn violations_accumulate_in_call_order() {
        let t = Table::new("user");
        let q = Select::from(&t)
            .limit(1)
            .limit(2)
            .where_(t.col("a").eq(1_i64))
            .where_(t.col("b").eq(2_i64))
            .offset(0)
            .offset(1);
        assert_eq!(
            q.build(&Dialect::generic()),
            Err(Error::Syntax(
                "Multiple limit clauses. Multiple where clauses. Multiple offset clauses. "
                    .to_string()
            ))
        );
    }

    #[test]
    fn build_twice_is_byte_identical() {
        let t = Table::new("user");
        let q = Select::from(&t)
            .fields([t.col("id")])
            .where_(t.col("age").ge(21_i64))
            .order_by([(t.col("id"), Order::Asc)]);
        let d = Dialect::generic();
        assert_eq!(q.build(&d).unwrap(), q.build(&d).unwrap());
    }

    #[test]
    fn not_in_subquery_in_where() {
        let user = Table::new("user");
        let banned = Table::new("banned");
        let sub = Select::from(&banned).fields([banned.col("user_id")]);
        let q = Select::from(&user).where_(user.col("id").not_in_query(sub));
        assert_eq!(
            sql(&q, &Dialect::generic()),
            "SELECT * FROM user WHERE user.id NOT IN (SELECT banned.user_id FROM banned)"
        );
    }
}
