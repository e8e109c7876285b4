use std::io;

fn main() {
    let input = prompt_for_number("Enter a number:");

    if input % 2 == 0 {
        println!("{} - even.", input);
    } else {
        println!("{} - odd.", input);
    }

    let factorial = (1..=input).product::<i32>();
    println!("Factorial of {} is {}.", input, factorial);
}

fn prompt_for_number(message: &str) -> i32 {
    println!("{}", message);
    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .expect("Failed to read input");

    input.trim().parse().expect("Please enter a valid number")
}
