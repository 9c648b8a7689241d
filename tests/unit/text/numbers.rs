use super::*;

#[test]
fn small_numbers() {
    assert_eq!(number_to_words(0), "zero");
    assert_eq!(number_to_words(7), "seven");
    assert_eq!(number_to_words(13), "thirteen");
    assert_eq!(number_to_words(40), "forty");
    assert_eq!(number_to_words(21), "twenty-one");
    assert_eq!(number_to_words(99), "ninety-nine");
}

#[test]
fn hundreds_use_and() {
    assert_eq!(number_to_words(100), "one hundred");
    assert_eq!(number_to_words(105), "one hundred and five");
    assert_eq!(number_to_words(342), "three hundred and forty-two");
}

#[test]
fn scale_groups_use_commas() {
    assert_eq!(number_to_words(1000), "one thousand");
    assert_eq!(number_to_words(1001), "one thousand and one");
    assert_eq!(number_to_words(1100), "one thousand, one hundred");
    assert_eq!(number_to_words(1234), "one thousand, two hundred and thirty-four");
    assert_eq!(number_to_words(2_000_050), "two million and fifty");
    assert_eq!(number_to_words(1_001_000), "one million, one thousand");
}
