#[cfg(test)]
mod integration_tests {
    use crate::{Normalizer, normalize, profile::preset};
    use std::borrow::Cow;

    const TITLES: &[(&str, &str)] = &[
        ("    ", ""),
        (
            "  some  ( test )  string ,  with . ошибками  !!  \n    ффф line.",
            "Some (test) string, with. Ошибками!!\n    Ффф line.",
        ),
        (
            "1. string  number1  .    \n    2. string  number2.",
            "1. String number1.\n    2. String number2.",
        ),
        (
            "some  numbers  1  1  ,  1  1  and  1  1  .  1  1  .",
            "Some numbers 11, 11 and 11.11.",
        ),
        (
            "some  \"  test  \"  string  .  some  test  \"  string  \"  .  ",
            "Some\"test\"string. Some test\"string\".",
        ),
        (
            "some  '  test  '  string  .  some  test  '  string  '  .  ",
            "Some'test'string. Some test'string'.",
        ),
        (
            "r  -  r  .  \nr  &  r  .  \nr  /  r  .  \nr  `  r  .  \n",
            "R-r.\nR&r.\nR/r.\nR`r.",
        ),
        ("  test  string  ", "Test string"),
        ("  Ф.О.Имя  ", "Ф. О. Имя"),
        ("  some  &  string  ", "Some&string"),
        ("  Хлопья  +  Отруби  ", "Хлопья+Отруби"),
        ("  Пюре яблоко   +груша+  персик  ", "Пюре яблоко+груша+персик"),
        ("  2  +  2  =  4  ", "2+2=4"),
        ("  (  2  +  2  )  *  2  =  8  ", "(2+2)*2=8"),
        ("  (  2  +  2  )  -  2  =  2  ", "(2+2)-2=2"),
        (
            "  (  (  (  2  -  2  )  +  (  1  + 1  )  )  /  2  )  *  2  =  2  ",
            "(((2-2)+(1+1))/2)*2=2",
        ),
        ("  (  (  (  )  )  )  ", "((()))"),
        ("  some  !  string  ", "Some! String"),
        ("  some  ,  test  .  string  ", "Some, test. String"),
        ("  some  -String  ", "Some-String"),
        ("  Some  (  Test  )  case.  ", "Some (Test) case."),
        ("  7  простых  ", "7 простых"),
        ("  4-  х  ", "4-х"),
        ("  капучино 3  0  0  мл  ", "Капучино 300 мл"),
        ("  Dr.dias  ", "Dr. Dias"),
        (
            "  йогурт 2  .  5  %  -  3  .  5  %  Слобода  ",
            "Йогурт 2.5%-3.5% Слобода",
        ),
        ("  огурцы 6  -  9  см  ", "Огурцы 6-9 см"),
        (
            "  Оливки с косточкой  /  без косточки  ",
            "Оливки с косточкой/без косточки",
        ),
        ("  Орех  Коко  -де-  мер  ", "Орех Коко-де-мер"),
        (
            "  какао  -  порошок обезжиренный  0  -  1  %  ",
            "Какао-порошок обезжиренный 0-1%",
        ),
        ("  D  '  Oro    D  `  Oro  ", "D'Oro D`Oro"),
        (
            "  КСБ  -  УФ  -  55  ,  ADD  -  SSE  - 44  ",
            "КСБ-УФ-55, ADD-SSE-44",
        ),
        (
            "  корейка свиная  б  /  к   (  карбонад)  ",
            "Корейка свиная б/к (карбонад)",
        ),
        (
            "  1  -  го сорта  ,  мука пшеничная  ",
            "1-го сорта, мука пшеничная",
        ),
        ("  хлопья  №  2   Агро  -  Альянс  ", "Хлопья №2 Агро-Альянс"),
        ("площадь 10 м² 2 шт", "Площадь 10 м² 2 шт"),
        ("  банка  ½ 1  л  ", "Банка ½ 1 л"),
    ];

    #[test]
    fn product_titles() {
        for &(raw, clean) in TITLES {
            assert_eq!(normalize(raw), clean, "input: {raw:?}");
        }
    }

    #[test]
    fn product_titles_through_normalizer() {
        let normalizer = Normalizer::clean();
        for &(raw, clean) in TITLES {
            assert_eq!(normalizer.normalize(raw).unwrap(), clean, "input: {raw:?}");
        }
    }

    #[test]
    fn product_titles_through_profile() {
        let profile = preset::clean();
        for &(raw, clean) in TITLES {
            assert_eq!(
                profile.run(Cow::Borrowed(raw)).unwrap(),
                clean,
                "input: {raw:?}"
            );
        }
    }

    #[test]
    fn cleaned_titles_are_fixed_points() {
        for &(_, clean) in TITLES {
            let again = normalize(clean);
            assert_eq!(again, clean);
        }
    }

    #[test]
    fn single_word() {
        assert_eq!(normalize("  amet!  "), "Amet!");
    }

    #[test]
    fn multilevel_list_keeps_indentation() {
        let raw = " level1          \n  *  level2      \n    -  level3    \n\n   level1        \n";
        assert_eq!(
            crate::collapse_whitespace(raw),
            "level1\n  * level2\n    - level3\n\n   level1"
        );
    }

    #[test]
    fn sentence_starts_are_capitalized() {
        assert_eq!(
            crate::capitalize("some . test . case ; for ; test\n new . line . add .\n more"),
            "Some . Test . Case ; For ; Test\n new . Line . Add .\n More"
        );
        assert_eq!(
            crate::capitalize("- some . test . case ; for ; test\n new . line . add .\n more"),
            "- some . Test . Case ; For ; Test\n new . Line . Add .\n More"
        );
    }

    #[test]
    fn decimals_and_lists() {
        assert_eq!(normalize("0.0"), "0.0");
        assert_eq!(normalize("0,0"), "0, 0");
        assert_eq!(normalize("e(e"), "E (e");
        assert_eq!(normalize("e№e"), "E №e");
        assert_eq!(normalize("e)e"), "E) e");
    }
}
