mod add;
mod sub_assign;
